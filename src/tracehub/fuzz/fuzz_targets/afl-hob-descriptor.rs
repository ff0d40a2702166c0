// Copyright (c) 2023 Intel Corporation
//
// SPDX-License-Identifier: BSD-2-Clause-Patent

mod fuzzlib;
use fuzzlib::fuzz_dispatch_hob;

fn main() {
    #[cfg(not(feature = "fuzz"))]
    {
        // Command line input seed file location
        let mut args = std::env::args().skip(1);
        if let Some(arg) = args.next() {
            println!("{}", arg);
            let paths = std::path::Path::new(&arg);

            if paths.is_file() {
                let tmp = std::fs::read(paths).expect("read crash file fail");
                fuzz_dispatch_hob(&tmp);
            } else if paths.is_dir() {
                for path in std::fs::read_dir(paths).unwrap() {
                    let path = &path.unwrap().path();
                    if path.ends_with("README.txt") {
                        continue;
                    }
                    let tmp = std::fs::read(path).expect("read crash file fail");
                    fuzz_dispatch_hob(&tmp);
                }
            } else {
                println!("No valid file path entered");
            }
        }
    }
    #[cfg(feature = "fuzz")]
    afl::fuzz!(|data: &[u8]| {
        fuzz_dispatch_hob(data);
    });
}
