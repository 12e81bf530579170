// Every invalid field is reported, not just the first one
#![allow(dead_code)]
use envreader::FromEnv;

#[derive(FromEnv)]
struct Config {
    pub port: u16,
    pub name: String,
    #[env(separator = ",")]
    pub enabled: bool,
}

fn main() {}
