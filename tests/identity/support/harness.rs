use std::sync::Arc;

use golden_crown::identity::application::command_services::identity_command_service_impl::IdentityCommandServiceImpl;

use super::fakes::FakePlayerAccountRepository;

pub struct IdentityCommandHarness {
    pub repository: Arc<FakePlayerAccountRepository>,
    pub service: IdentityCommandServiceImpl,
}

pub fn create_command_harness() -> IdentityCommandHarness {
    let repository = Arc::new(FakePlayerAccountRepository::new());
    let service = IdentityCommandServiceImpl::new(repository.clone());

    IdentityCommandHarness {
        repository,
        service,
    }
}
