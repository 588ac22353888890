mod harness;

pub use fakes::FakePlayerAccountRepository;
pub use fixtures::{
    login_command, register_command_brazilian, register_command_foreign, register_form_brazilian,
    seeded_account, FORMATTED_CPF, PLAYER_EMAIL, STRONG_PASSWORD, VALID_CPF,
};
pub use harness::{create_command_harness, IdentityCommandHarness};
