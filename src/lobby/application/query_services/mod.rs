pub mod lobby_query_service_impl;
