pub mod query_services;
