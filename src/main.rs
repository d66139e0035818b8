fn main() -> anyhow::Result<()> {
    sitewatch::app::run()
}
