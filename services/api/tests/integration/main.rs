mod address_test;
mod postgres_test;
mod route_test;
