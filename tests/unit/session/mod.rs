mod test_renewal;
mod test_store;
