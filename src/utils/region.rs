/// 區域別名對照表：別名 -> 平台代號
static REGION_ALIASES: &[(&str, &str)] = &[
    ("euw", "euw1"),
    ("euw1", "euw1"),
    ("eu-west", "euw1"),
    ("europe-west", "euw1"),
    ("eune", "eun1"),
    ("eune1", "eun1"),
    ("eun1", "eun1"),
    ("eu-nordic", "eun1"),
    ("europe-nordic", "eun1"),
    ("br", "br1"),
    ("br1", "br1"),
    ("brazil", "br1"),
    ("jp", "jp1"),
    ("jp1", "jp1"),
    ("japan", "jp1"),
    ("kr", "kr"),
    ("kr1", "kr"),
    ("korea", "kr"),
    ("lan", "la1"),
    ("la1", "la1"),
    ("latin-america-north", "la1"),
    ("latin-north", "la1"),
    ("las", "la2"),
    ("la2", "la2"),
    ("latin-america-south", "la2"),
    ("latin-south", "la2"),
    ("na", "na1"),
    ("na1", "na1"),
    ("north-america", "na1"),
    ("na-og", "na"),
    ("oce", "oc1"),
    ("oc1", "oc1"),
    ("oceania", "oc1"),
    ("tr", "tr1"),
    ("tr1", "tr1"),
    ("turkey", "tr1"),
    ("ru", "ru"),
    ("ru1", "ru"),
    ("russia", "ru"),
    ("pbe", "pbe1"),
    ("pbe1", "pbe1"),
    ("player-beta-environment", "pbe1"),
    ("player-beta", "pbe1"),
    ("americas", "americas"),
    ("europe", "europe"),
    ("asia", "asia"),
];

/// 將使用者輸入的區域名稱正規化為平台代號
///
/// 不分大小寫，空白視為 `-`，例如 `"North America"` -> `"na1"`。
pub fn normalize(region: &str) -> Option<&'static str> {
    let key = region.trim().to_lowercase().replace(' ', "-");
    REGION_ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, platform)| *platform)
}

pub fn platforms() -> Vec<&'static str> {
    let mut platforms: Vec<&'static str> = REGION_ALIASES.iter().map(|(_, p)| *p).collect();
    platforms.sort_unstable();
    platforms.dedup();
    platforms
}
