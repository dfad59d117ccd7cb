fn main() -> anyhow::Result<()> {
    cpkit_cli::run()
}
