use std::process::ExitCode;

fn main() -> ExitCode {
    match exact_quad::app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
