pub mod identity_command_service_impl;
