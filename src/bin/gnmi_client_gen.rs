use gnmi_client_gen::cli::run_cli;

fn main() -> anyhow::Result<()> {
    run_cli()
}
