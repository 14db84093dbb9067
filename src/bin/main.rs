use anyhow::Result;

fn main() -> Result<()> {
    arcstat::start_arcstat()
}
