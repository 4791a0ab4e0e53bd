use super::*;

fn clip(id: u32) -> VideoAsset {
    VideoAsset::new(id, format!("videos/hero-{id}.mp4"), format!("videos/poster-{id}.jpg"))
}

#[test]
fn empty_playlist_is_rejected() {
    let err = Playlist::new(vec![]).unwrap_err();
    assert!(err.to_string().contains("at least one clip"));
}

#[test]
fn duplicate_ids_are_rejected() {
    let err = Playlist::new(vec![clip(1), clip(2), clip(1)]).unwrap_err();
    assert!(err.to_string().contains("duplicate clip id #1"));
}

#[test]
fn blank_source_is_rejected() {
    let err = Playlist::new(vec![VideoAsset::new(1, "  ", "p.jpg")]).unwrap_err();
    assert!(err.to_string().contains("empty source"));
}

#[test]
fn wrapping_get_cycles() {
    let p = Playlist::new(vec![clip(1), clip(2), clip(3)]).unwrap();
    assert_eq!(p.len(), 3);
    assert_eq!(p.wrapping_get(0).id, VideoId(1));
    assert_eq!(p.wrapping_get(3).id, VideoId(1));
    assert_eq!(p.wrapping_get(5).id, VideoId(3));
}

#[test]
fn deserializes_from_src_alias_and_validates() {
    let p: Playlist = serde_json::from_str(
        r#"[{"id": 1, "src": "a.mp4", "poster": "a.jpg"},
            {"id": 2, "source": "b.mp4", "poster": "b.jpg"}]"#,
    )
    .unwrap();
    assert_eq!(p.wrapping_get(1).source, "b.mp4");

    let bad = serde_json::from_str::<Playlist>("[]");
    assert!(bad.is_err());
}

#[test]
fn stock_playlist_is_valid() {
    let stock = Playlist::stock();
    assert_eq!(stock.len(), 4);
    assert_eq!(stock.wrapping_get(0).source, "videos/hero-1.mp4");
    assert_eq!(stock.wrapping_get(3).poster, "videos/poster-4.jpg");
    let assets: Vec<VideoAsset> = stock.clone().into();
    assert_eq!(Playlist::new(assets).unwrap(), stock);
}
