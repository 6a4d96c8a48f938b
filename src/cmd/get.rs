use clap::{arg, command, ArgMatches, Command};

use super::CommandType;
use crate::secret::is_base32_key;
use crate::totp::{moving_factor, GetTime, Totp};
use crate::writer::OutErr;

pub fn subcommand() -> Command<'static> {
    command!(CommandType::Get.as_str())
        .about("Get the current one-time password")
        .args(&[arg!(-k --key <KEY> "Base32 secret key")
            .required(true)
            .validator(is_base32_key)])
}

pub fn run_get<W, C>(get_args: &ArgMatches, writer: &mut W, clock: &C)
where
    W: OutErr,
    C: GetTime,
{
    let key = match get_args.value_of("key") {
        Some(key) => key,
        _ => {
            writer.write_err("Key is required\n");
            return;
        }
    };

    let engine = match Totp::with_default_window(key) {
        Ok(engine) => engine,
        Err(err) => {
            writer.write_err(&format!("{}\n", err));
            return;
        }
    };

    match engine.compute_code(moving_factor(clock), 0) {
        Ok(code) => writer.write(&format!("{:0>6}\n", code)),
        Err(err) => writer.write_err(&format!("{}\n", err)),
    }
}
