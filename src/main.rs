fn main() -> anyhow::Result<()> {
    silk_ledger::run()
}
