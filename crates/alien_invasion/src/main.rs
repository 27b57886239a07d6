fn main() -> anyhow::Result<()> {
    env_logger::init();
    alien_invasion::run()
}
