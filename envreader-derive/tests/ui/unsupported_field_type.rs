// Types other than String, i64, bool and Vec<String> need a deserializer
#![allow(dead_code)]
use envreader::FromEnv;

#[derive(FromEnv)]
struct Config {
    pub port: u16,
}

fn main() {}
