//! Read-only projection of a configuration object into documented records.

use serde::Serialize;

use crate::field::Configurable;
use crate::option::OptionRegistry;
use crate::value::OptionValue;

/// One listed option with its current value.
///
/// Serialises with the keys the management API expects:
/// `name`, `env`, `info` and `data`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub name: &'static str,
    /// Environment alias, empty when the option has none.
    #[serde(rename = "env")]
    pub env_alias: &'static str,
    #[serde(rename = "info")]
    pub usage: &'static str,
    #[serde(rename = "data")]
    pub value: OptionValue,
}

/// Lists every documented option of `config` with its live value.
///
/// Fields follow declaration order. A field is left out when it has no
/// descriptor or its descriptor's usage text is empty. The result is built
/// fresh on every call.
pub fn introspect<T: Configurable>(config: &T, registry: &OptionRegistry) -> Vec<Record> {
    T::fields()
        .iter()
        .filter_map(|field| {
            let desc = registry.descriptor_for(field.name)?;
            if !desc.is_listed() {
                return None;
            }
            Some(Record {
                name: desc.name,
                env_alias: desc.env_alias.unwrap_or_default(),
                usage: desc.usage,
                value: field.get(config),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binder::bind;
    use crate::option::OptionDescriptor;
    use crate::source::MapSource;
    use crate::Configurable;

    static OPTIONS: &[OptionDescriptor] = &[
        OptionDescriptor::string("server_addr", ":443", "listen address").env("LINK_SERVER_ADDR"),
        OptionDescriptor::int("max_client", 100, "maximum clients"),
        OptionDescriptor::boolean("proxy_protocol", false, ""),
        OptionDescriptor::string("conf", "./conf/server.toml", "config file"),
    ];

    #[derive(Debug, Default, Configurable)]
    struct Listed {
        max_client: i64,
        proxy_protocol: bool,
        build_tag: String,
        server_addr: String,
    }

    fn registry() -> OptionRegistry {
        OptionRegistry::new(OPTIONS).unwrap()
    }

    #[test]
    fn test_omits_undocumented_and_unregistered_fields() {
        let cfg = Listed {
            max_client: 5,
            proxy_protocol: true,
            build_tag: "dev".to_string(),
            server_addr: ":8443".to_string(),
        };
        let records = introspect(&cfg, &registry());

        assert_eq!(
            records,
            vec![
                Record {
                    name: "max_client",
                    env_alias: "",
                    usage: "maximum clients",
                    value: OptionValue::Int(5),
                },
                Record {
                    name: "server_addr",
                    env_alias: "LINK_SERVER_ADDR",
                    usage: "listen address",
                    value: OptionValue::from(":8443"),
                },
            ]
        );
    }

    #[test]
    fn test_reflects_live_values() {
        let registry = registry();
        let mut cfg = Listed::default();
        bind(&mut cfg, &registry, &MapSource::new().set("max_client", 10_i64));
        let first = introspect(&cfg, &registry);

        bind(&mut cfg, &registry, &MapSource::new().set("max_client", 20_i64));
        let second = introspect(&cfg, &registry);

        assert_eq!(first[0].value, OptionValue::Int(10));
        assert_eq!(second[0].value, OptionValue::Int(20));
    }

    #[test]
    fn test_record_serialization() {
        let record = Record {
            name: "server_addr",
            env_alias: "LINK_SERVER_ADDR",
            usage: "listen address",
            value: OptionValue::from(":443"),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "server_addr",
                "env": "LINK_SERVER_ADDR",
                "info": "listen address",
                "data": ":443",
            })
        );
    }
}
