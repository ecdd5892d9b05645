/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::process::exit;

use log::error;

use crate::workflow::run_command;

mod cmd_args;
mod cmd_parsers;
mod serde;
mod workflow;

pub fn main() {
    let mut cmd = cmd_args::create_cmd_args();
    let options = cmd.get_matches_mut();

    cmd_parsers::global_options::setup_logger(&options);

    let parsed_opts = cmd_parsers::global_options::parse_options(&options);

    if let Err(err) = run_command(&options, &parsed_opts) {
        println!();
        error!(" Could not complete workflow, reason {:?}", err);

        if err.is_configuration_error() {
            workflow::print_usage(&mut cmd, &options);
        }
        println!();
        exit(-1);
    }
}
