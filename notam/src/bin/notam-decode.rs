// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Parses NOTAMs from files or stdin.
//!
//! Usage: `notam-decode [--decode] [FILE...]`
//!
//! Each file holds one NOTAM. Without files, a NOTAM is read from stdin.
//! With `--decode`, the NOTAM's text is printed with its abbreviations
//! written out instead of the parsed fields.

use std::env;
use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use notam::Notam;

fn main() -> ExitCode {
    let mut decode = false;
    let mut paths = Vec::new();

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--decode" | "-d" => decode = true,
            "--help" | "-h" => {
                eprintln!("usage: notam-decode [--decode] [FILE...]");
                return ExitCode::SUCCESS;
            }
            _ => paths.push(arg),
        }
    }

    let texts = if paths.is_empty() {
        let mut text = String::new();
        match io::stdin().read_to_string(&mut text) {
            Ok(_) => vec![("<stdin>".to_string(), text)],
            Err(e) => {
                eprintln!("can't read stdin: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        let mut texts = Vec::with_capacity(paths.len());
        for path in paths {
            match fs::read_to_string(&path) {
                Ok(text) => texts.push((path, text)),
                Err(e) => {
                    eprintln!("can't read {path}: {e}");
                    return ExitCode::FAILURE;
                }
            }
        }
        texts
    };

    let mut status = ExitCode::SUCCESS;

    for (name, text) in texts {
        match text.parse::<Notam>() {
            Ok(notam) if decode => println!("{}", notam.decoded()),
            Ok(notam) => println!("{notam:#?}"),
            Err(e) => {
                eprintln!("{name}: {e}");
                status = ExitCode::FAILURE;
            }
        }
    }

    status
}
