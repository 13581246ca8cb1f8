fn main() -> anyhow::Result<()> {
    coilab::cli::run_cli()
}
