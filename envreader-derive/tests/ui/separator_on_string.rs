// separator only applies to Vec<String> fields
#![allow(dead_code)]
use envreader::FromEnv;

#[derive(FromEnv)]
struct Config {
    #[env(separator = ";")]
    pub name: String,
}

fn main() {}
