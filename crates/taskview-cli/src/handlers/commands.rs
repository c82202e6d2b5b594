use anyhow::Result;
use taskview_engine::get_all_renderers;

pub fn handle() -> Result<()> {
    let width = get_all_renderers()
        .iter()
        .map(|meta| meta.kind.command().len())
        .max()
        .unwrap_or(0);

    for meta in get_all_renderers() {
        println!("{:<width$}  {}", meta.kind.command(), meta.description);
    }
    Ok(())
}
