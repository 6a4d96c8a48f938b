use clap::{arg, command, ArgMatches, Command};

use super::CommandType;
use crate::secret::is_base32_key;
use crate::totp::{GetTime, Totp, DEFAULT_WINDOW};
use crate::writer::OutErr;

pub fn subcommand() -> Command<'static> {
    command!(CommandType::Validate.as_str())
        .about("Validate a one-time password")
        .args(&[
            arg!(-k --key <KEY> "Base32 secret key")
                .required(true)
                .validator(is_base32_key),
            arg!(-t --token <TOKEN> "One-time password to validate").required(true),
            arg!(-w --window <WINDOW> "Accepted 30 second steps either side of now, 1 to 10")
                .required(false),
        ])
}

pub fn run_validate<W, C>(validate_args: &ArgMatches, writer: &mut W, clock: &C)
where
    W: OutErr,
    C: GetTime,
{
    let (key, token) = match (
        validate_args.value_of("key"),
        validate_args.value_of("token"),
    ) {
        (Some(key), Some(token)) => (key, token),
        _ => {
            writer.write_err("Key and token are required\n");
            return;
        }
    };

    let parsed_token = match token.parse::<u32>() {
        Ok(parsed_token) => parsed_token,
        Err(err) => {
            writer.write_err(&format!("Unable to parse token: {}\n", err));
            return;
        }
    };

    let window = match validate_args.value_of("window") {
        Some(window) => match window.parse::<i64>() {
            Ok(window) => window,
            Err(err) => {
                writer.write_err(&format!("Unable to parse window: {}\n", err));
                return;
            }
        },
        None => DEFAULT_WINDOW,
    };

    let engine = match Totp::new(window, key) {
        Ok(engine) => engine,
        Err(err) => {
            writer.write_err(&format!("{}\n", err));
            return;
        }
    };

    match engine.verify_code_at(parsed_token, clock) {
        Ok(true) => writer.write(&format!("{:0>6} valid\n", parsed_token)),
        Ok(false) => writer.write_err("Invalid code\n"),
        Err(err) => writer.write_err(&format!("{}\n", err)),
    }
}
