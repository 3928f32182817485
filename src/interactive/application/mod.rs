pub mod catalog_service;
pub mod search_service;

#[cfg(test)]
mod catalog_service_test;
#[cfg(test)]
mod search_service_test;
