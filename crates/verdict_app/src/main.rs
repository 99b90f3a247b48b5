mod session;

fn main() -> anyhow::Result<()> {
    session::run_app()
}
