// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on how to use CLAP, here are some resources:
//! 1. [Tutorial](https://developerlife.com/2023/09/17/tuify-clap/)
//! 2. [Video](https://youtu.be/lzMYDA6St0s)

use std::process::ExitCode;

use clap::Parser;
use r3bl_nyan_cat::{CLIArg, CommonResult, HostDriver, NyanCatConfig, OutputDevice,
                    try_initialize_logging_global};
use tokio::io::BufReader;

#[tokio::main]
#[allow(clippy::needless_return)]
async fn main() -> CommonResult<ExitCode> {
    let cli_arg = CLIArg::parse();
    let config = NyanCatConfig::from(&cli_arg);

    let should_log = config.tracing_config.is_enabled();

    should_log.then(|| {
        try_initialize_logging_global(config.tracing_config.clone()).ok();
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    });

    let reporter = config.create_reporter(OutputDevice::new_stdout());
    let mut driver = HostDriver::new(reporter);

    let command_succeeded = if config.command.is_empty() {
        let stdin = BufReader::new(tokio::io::stdin());
        driver.drive_lines(config.event_format, stdin).await?;
        true
    } else {
        driver
            .drive_command(config.event_format, &config.command)
            .await?
    };

    let exit_code = if driver.any_failed() || !command_succeeded {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    };

    should_log.then(|| {
        tracing::debug!(
            message = "Stop logging...",
            any_failed = driver.any_failed(),
            command_succeeded = command_succeeded
        );
    });

    Ok(exit_code)
}
