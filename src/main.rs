use clap::Command;

mod cmd;
mod error;
mod secret;
mod totp;
mod writer;

#[cfg(test)]
mod tests;

use crate::cmd::CommandType;
use crate::totp::Clock;
use crate::writer::OtpWriter;

fn main() {
    let matches = Command::new("totp")
        .about("Generate and verify time-based one-time passwords")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(cmd::generate::subcommand())
        .subcommand(cmd::get::subcommand())
        .subcommand(cmd::validate::subcommand())
        .subcommand(cmd::url::subcommand())
        .get_matches();

    let mut writer = OtpWriter::new();

    match matches.subcommand() {
        Some((name, sub_args)) if name == CommandType::Generate.as_str() => {
            cmd::generate::run_generate(sub_args, &mut writer)
        }
        Some((name, sub_args)) if name == CommandType::Get.as_str() => {
            cmd::get::run_get(sub_args, &mut writer, &Clock::new())
        }
        Some((name, sub_args)) if name == CommandType::Validate.as_str() => {
            cmd::validate::run_validate(sub_args, &mut writer, &Clock::new())
        }
        Some((name, sub_args)) if name == CommandType::Url.as_str() => {
            cmd::url::run_url(sub_args, &mut writer)
        }
        _ => unreachable!("a subcommand is required"),
    }
}
