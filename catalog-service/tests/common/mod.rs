#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;

pub const API_KEY: &str = "mysecretkey";

pub const SCENARIO_CSV: &str = "\
title,category,price,rating,availability
The Hobbit,Fantasy,£10.00,Five,In stock
Bad Row,Fantasy,notaprice,Two,In stock
1984,Dystopia,£7.50,Four,Out of stock
";

pub fn write_source(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp source file");
    file.write_all(contents.as_bytes())
        .expect("write temp source file");
    file
}
