use bot_commons::*;

fn main() {
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "WARN,homework_status_bot=debug");
    }
    if start_everything(homework_status_bot::entry()).is_err() {
        std::process::exit(1);
    }
}
