use anyhow::Context;
use debrid_filetree::{
    conf::PickerConf, info::TorrentInfo, picker::FilePicker, selection::SelectionState,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let path = args
        .next()
        .context("usage: inspect <torrent-info.json> [picker-conf.json]")?;
    let conf = match args.next() {
        Some(conf) => {
            let json = std::fs::read_to_string(&conf)
                .with_context(|| format!("cannot read {conf}"))?;
            PickerConf::from_json(&json).with_context(|| format!("invalid picker conf {conf}"))?
        }
        None => PickerConf::default(),
    };

    let info =
        TorrentInfo::from_path(&path).with_context(|| format!("cannot load torrent info {path}"))?;
    let picker = FilePicker::from_info(&info, conf);

    for row in picker.listing() {
        let mark = match row.state {
            SelectionState::Selected => "[x]",
            SelectionState::Unselected => "[ ]",
            SelectionState::Partial => "[~]",
        };
        let name = if row.depth == 0 {
            info.filename.as_str()
        } else {
            row.entry.name.as_str()
        };
        let indent = "  ".repeat(row.depth);
        if row.is_folder() {
            println!(
                "{indent}{mark} {name}/ ({} files, {} bytes)",
                row.file_count, row.size_bytes
            );
        } else {
            println!("{indent}{mark} {name} #{} ({} bytes)", row.entry.id, row.size_bytes);
        }
    }

    println!(
        "selected {}/{} files, {} bytes",
        picker.selected_count(),
        picker.file_count(),
        picker.selected_bytes()
    );
    match picker.commit(false) {
        Ok(param) => println!("files={param}"),
        Err(e) => println!("{e}"),
    }
    Ok(())
}
