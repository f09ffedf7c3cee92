use std::path::Path;

use console::Style;

pub fn print_saved(path: &Path, dimensions: Option<(u32, u32)>) {
    let label = Style::new().dim();
    let value = Style::new().bold().white();
    let path_style = Style::new().underlined();

    println!(
        "  {:<10}{}",
        label.apply_to("Saved"),
        path_style.apply_to(path.display())
    );
    if let Some((w, h)) = dimensions {
        println!(
            "  {:<10}{}",
            label.apply_to("Size"),
            value.apply_to(format!("{w}x{h} px"))
        );
    }
}
