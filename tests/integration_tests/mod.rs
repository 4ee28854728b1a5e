mod charges;
mod customers;
mod errors;
