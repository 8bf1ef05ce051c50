use argh::FromArgs;
use vtf_decode_formats::ImageFormat;

#[derive(FromArgs, Debug)]
/// List every VTF pixel format and whether it can be decoded
#[argh(subcommand, name = "formats")]
pub struct FormatsCmd {
    /// only list formats that can be decoded
    #[argh(switch)]
    pub supported_only: bool,
}

/// Describes how much storage a format uses, e.g. `3 B/px` or `8 B/block`.
fn storage(format: ImageFormat) -> String {
    match (format.bytes_per_pixel(), format.block_size()) {
        (Some(bpp), _) => format!("{bpp} B/px"),
        (None, Some(block)) => format!("{block} B/block"),
        (None, None) => String::from("-"),
    }
}

/// One table row per format, in VTF id order.
pub fn format_table(supported_only: bool) -> Vec<String> {
    ImageFormat::all_values()
        .iter()
        .filter(|format| !supported_only || format.is_supported())
        .map(|&format| {
            format!(
                "{:>2}  {:<18} {:<11} {:<10} {}",
                format.id(),
                format.name(),
                if format.is_supported() { "supported" } else { "unsupported" },
                storage(format),
                if format.has_alpha() { "alpha" } else { "" },
            )
            .trim_end()
            .to_string()
        })
        .collect()
}

pub fn handle_formats_command(cmd: FormatsCmd) {
    for row in format_table(cmd.supported_only) {
        println!("{row}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_format() {
        let table = format_table(false);
        assert_eq!(table.len(), ImageFormat::all_values().len());
        assert!(table[0].starts_with(" 0  RGBA8888"));
        assert!(table[7].contains("P8") && table[7].contains("unsupported"));
    }

    #[test]
    fn supported_only_skips_unsupported() {
        let table = format_table(true);
        assert_eq!(table.len(), 22);
        assert!(table.iter().all(|row| !row.contains("unsupported")));
        assert!(table.iter().any(|row| row.contains("DXT1_ONEBITALPHA")));
    }

    #[test]
    fn storage_column() {
        assert_eq!(storage(ImageFormat::RGB888), "3 B/px");
        assert_eq!(storage(ImageFormat::DXT1), "8 B/block");
    }
}
