use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = jot::run() {
        // Reported on stdout alongside normal output; the exit status marks failure.
        println!("error: {err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
