fn main() {
    if let Err(e) = projectile_lifecycle::game::run() {
        eprintln!("startup failed: {e}");
        std::process::exit(1);
    }
}
