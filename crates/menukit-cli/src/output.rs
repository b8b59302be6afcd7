use menukit_core::definition::SkinInfo;
use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Formats the active skin list, lowest priority first. The `#` column is
/// the 1-based priority rank; later rows override earlier ones.
pub fn skin_list_lines(skins: &[SkinInfo]) -> Vec<String> {
    let name_w = skins
        .iter()
        .map(|s| s.name.len())
        .chain(["NAME".len()])
        .max()
        .unwrap_or(0);
    let display_w = skins
        .iter()
        .map(|s| s.display_name.len())
        .chain(["DISPLAY NAME".len()])
        .max()
        .unwrap_or(0);

    let mut lines = vec![format!(
        " #  {:name_w$}  {:display_w$}  VERSION",
        "NAME", "DISPLAY NAME"
    )];
    for (rank, skin) in skins.iter().enumerate() {
        let version = skin.version.as_deref().unwrap_or("-");
        lines.push(format!(
            "{:>2}  {:name_w$}  {:display_w$}  {}",
            rank + 1,
            skin.name,
            skin.display_name,
            version
        ));
    }
    lines
}

pub fn print_skin_list(skins: &[SkinInfo]) {
    for line in skin_list_lines(skins) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(name: &str, display: &str, version: Option<&str>) -> SkinInfo {
        SkinInfo {
            name: name.to_string(),
            display_name: display.to_string(),
            version: version.map(str::to_string),
        }
    }

    #[test]
    fn ranks_follow_priority_order() {
        let lines = skin_list_lines(&[
            info("base", "Base Theme", Some("1.0.0")),
            info("dark", "Dark Mode", None),
        ]);
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with(" 1  base"));
        assert!(lines[2].starts_with(" 2  dark"));
        assert!(lines[2].ends_with('-'));
    }

    #[test]
    fn columns_align_on_longest_cell() {
        let lines = skin_list_lines(&[
            info("s", "Short", Some("0.1")),
            info("much-longer-name", "A Considerably Longer Display Name", None),
        ]);
        let version_col = lines[0].find("VERSION").unwrap();
        for line in &lines[1..] {
            assert!(line.len() > version_col);
        }
        assert_eq!(lines[1].rfind("0.1").unwrap(), version_col);
        assert_eq!(lines[2].rfind('-').unwrap(), version_col);
    }
}
