use std::sync::Arc;

use crate::identity::{
    application::command_services::identity_command_service_impl::IdentityCommandServiceImpl,
    domain::services::identity_command_service::IdentityCommandService,
    infrastructure::persistence::repositories::in_memory::in_memory_player_account_repository_impl::InMemoryPlayerAccountRepositoryImpl,
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub struct IdentityModule {
    pub command_service: Arc<dyn IdentityCommandService>,
}

pub fn build_identity_module() -> IdentityModule {
    let player_account_repository = Arc::new(InMemoryPlayerAccountRepositoryImpl::new());
    let command_service = Arc::new(IdentityCommandServiceImpl::new(player_account_repository));

    IdentityModule { command_service }
}
