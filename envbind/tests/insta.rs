//! Snapshotting the bound keys documents which environment variables an
//! application responds to.

#[test]
fn snapshot_as_documentation() {
    use foo::bar::AppConfig;
    // simulate module structure.
    #[allow(unused)]
    mod foo {
        pub mod bar {
            use std::net::SocketAddr;

            use envbind::Bindable;

            use super::baz::KafkaConfig;

            #[derive(Bindable)]
            pub struct AppConfig {
                #[bind(mapstructure = "database_url")]
                pub database_url: String,
                #[bind(mapstructure = "socket_addr")]
                pub socket_addr: SocketAddr,
                #[bind(mapstructure = "kafka")]
                pub kafka: Option<KafkaConfig>,
                #[bind(mapstructure = "api_key", opaque)]
                pub api_key: secrecy::SecretString,
            }
        }

        pub mod baz {
            use envbind::Bindable;

            #[derive(Bindable, Default)]
            pub struct KafkaConfig {
                #[bind(mapstructure = "brokers")]
                pub brokers: Vec<String>,
                #[bind(mapstructure = "group_id")]
                pub group_id: String,
            }
        }
    }

    let config = AppConfig {
        database_url: "postgres://postgres@postgres/postgres".into(),
        socket_addr: ([127, 0, 0, 1], 3000).into(),
        kafka: None,
        api_key: "definitely-not-an-api-key".into(),
    };

    let env_vars = envbind::keys(&config, [])
        .unwrap()
        .iter()
        .map(|key| key.to_uppercase())
        .collect::<Vec<_>>()
        .join("\n");

    insta::assert_snapshot!(env_vars, @r"
    DATABASE_URL
    SOCKET_ADDR
    KAFKA_BROKERS
    KAFKA_GROUP_ID
    KAFKA
    API_KEY
    ");
}
