#![deny(warnings)]
#![deny(rust_2018_idioms)]

use ais_info::settings::Settings;
use config::{Config, File};

pub mod helper;
pub mod info;

#[test]
fn test_local_settings_are_valid() {
    Config::builder()
        .add_source(File::with_name("config/local.yml").required(true))
        .set_override("environment", "Local")
        .unwrap()
        .build()
        .unwrap()
        .try_deserialize::<Settings>()
        .unwrap();
}

#[test]
fn test_test_settings_are_valid() {
    let settings = Config::builder()
        .add_source(File::with_name("config/test.yml").required(true))
        .set_override("environment", "Test")
        .unwrap()
        .build()
        .unwrap()
        .try_deserialize::<Settings>()
        .unwrap();

    assert!(settings.sources.is_empty());
    assert!(settings.per_sender);
}
