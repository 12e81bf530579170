// A deserialized field has no default to fall back on
#![allow(dead_code)]
use envreader::FromEnv;

#[derive(FromEnv)]
struct Config {
    #[env(deserializer = "serde_json::from_str", default = vec![80])]
    pub ports: Vec<u16>,
}

fn main() {}
