/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
/// Authentication payloads and stored credential models
pub mod auth;
/// Authenticated HTTP client with single-flight token renewal
pub mod http;
/// Response envelope and normalized response bodies
pub mod responses;
