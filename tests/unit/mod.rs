mod session;
mod test_error;
