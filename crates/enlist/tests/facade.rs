use enlist::domain::config::ApiConfig;
use enlist::features::registration::Registration;
use enlist::kernel::server::ApiState;
use enlist_database::Database;
use enlist_mailer::{Mailer, Tls};

#[test]
fn registration_is_enabled() {
    assert!(enlist::features::is_enabled("registration"));
    assert!(!enlist::features::is_enabled("licensing"));
}

#[test]
fn router_documents_every_route() {
    let (_router, api) = enlist::server::router::api_router().split_for_parts();
    for path in ["/", "/health", "/api/register"] {
        assert!(api.paths.paths.contains_key(path), "{path}");
    }
}

#[test]
fn migrations_include_registrant_schema() {
    let migrations = enlist::migrations();
    assert!(migrations.iter().any(|m| m.slice == "registration"));
}

#[tokio::test]
async fn init_registers_the_registration_slice() {
    let config = ApiConfig::default();
    let database = Database::builder()
        .url("mem://")
        .session("enlist", "facade_test")
        .migrations(enlist::migrations())
        .init()
        .await
        .unwrap();
    let mailer = Mailer::builder()
        .host("localhost")
        .port(2525)
        .tls(Tls::None)
        .sender("Club Event", "events@example.com")
        .build()
        .unwrap();

    let slices = enlist::init(&config, &database, &mailer).unwrap();
    let state = ApiState::builder().config(config).register_slices(slices).build().unwrap();

    assert!(state.get_slice::<Registration>().is_some());
}
