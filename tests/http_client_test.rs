use anyhow::Result;
use httpmock::prelude::*;
use stat_quest::adapters::http::API_KEY_HEADER;
use stat_quest::core::PayloadSource;
use stat_quest::{HttpSource, ManifestRegistry, QuestClient, QuestEngine, QuestError, Value};
use std::collections::HashMap;

fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// 測試 summoner 端點：帶 API key，回應實體化為 Summoner
#[tokio::test]
async fn test_summoner_by_name() -> Result<()> {
    let server = MockServer::start_async().await;

    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/lol/summoner/v4/summoners/by-name/Faker")
                .header(API_KEY_HEADER, "RGAPI-test");
            then.status(200).json_body(serde_json::json!({
                "id": "enc-id",
                "accountId": "enc-account",
                "puuid": "enc-puuid",
                "name": "Faker",
                "profileIconId": 6,
                "revisionDate": 1568671330000_i64,
                "summonerLevel": "512",
                "rank": "unranked"
            }));
        })
        .await;

    let source = HttpSource::new(server.base_url(), Some("RGAPI-test".to_string()));
    let client = QuestClient::new(source, QuestEngine::new(ManifestRegistry::with_catalog()));

    let value = client
        .call("summoner.name", &params(&[("name", "Faker")]), "korea")
        .await?;

    api_mock.assert_async().await;

    let summoner = value.as_object().expect("summoner object");
    println!("🔍 Summoner: {}", summoner.to_json());
    assert_eq!(summoner.type_name(), "Summoner");
    assert_eq!(summoner.region(), "kr");
    assert_eq!(summoner.get_i64("summonerLevel"), Some(512));
    assert_eq!(summoner.get_i64("revisionDate"), Some(1568671330000));
    assert_eq!(summoner.extra("rank"), Some(&serde_json::json!("unranked")));

    Ok(())
}

/// 測試多層巢狀回應：featured games
#[tokio::test]
async fn test_featured_games_nested_payload() -> Result<()> {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/lol/spectator/v4/featured-games");
            then.status(200).json_body(serde_json::json!({
                "gameList": [{
                    "gameId": 4200000001_i64,
                    "mapId": 11,
                    "gameMode": "CLASSIC",
                    "bannedChampions": [
                        {"championId": 64, "teamId": 100, "pickTurn": 1},
                        {"championId": 12, "teamId": 200, "pickTurn": 2}
                    ],
                    "participants": [
                        {"teamId": 100, "championId": 103, "summonerName": "a", "bot": false, "spell1Id": 4, "spell2Id": 14},
                        {"teamId": 200, "championId": 22, "summonerName": "b", "bot": 0, "spell1Id": 4, "spell2Id": 7}
                    ],
                    "observers": {"encryptionKey": "secret"},
                    "platformId": "EUW1"
                }],
                "clientRefreshInterval": 300
            }));
        })
        .await;

    let source = HttpSource::new(server.base_url(), None);
    let client = QuestClient::new(source, QuestEngine::new(ManifestRegistry::with_catalog()));

    let value = client
        .call("spectator.featured", &HashMap::new(), "euw")
        .await?;

    let featured = value.as_object().expect("featured games");
    let games = featured.get_list("gameList").expect("game list");
    assert_eq!(games.len(), 1);

    let game = games.get(0).and_then(Value::as_object).expect("game");
    assert_eq!(game.region(), "euw1");
    assert_eq!(game.get_str("gameMode"), Some("CLASSIC"));

    let participants = game.get_list("participants").expect("participants");
    let bots: Vec<bool> = participants
        .values()
        .map(|p| p.as_object().and_then(|p| p.get_bool("bot")).unwrap())
        .collect();
    assert_eq!(bots, vec![false, false]);

    let banned: Vec<i64> = game
        .get_list("bannedChampions")
        .expect("bans")
        .values()
        .filter_map(|b| b.as_object().and_then(|b| b.get_i64("championId")))
        .collect();
    assert_eq!(banned, vec![64, 12]);

    assert_eq!(
        game.get_object("observers").and_then(|o| o.get_str("encryptionKey")),
        Some("secret")
    );

    Ok(())
}

/// 非 2xx 回應轉為 ApiStatusError
#[tokio::test]
async fn test_error_status_is_reported() -> Result<()> {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/lol/platform/v3/champion-rotations");
            then.status(403)
                .json_body(serde_json::json!({"status": {"message": "Forbidden"}}));
        })
        .await;

    let source = HttpSource::new(server.base_url(), None);
    let err = source
        .fetch("na1", "/lol/platform/v3/champion-rotations")
        .await
        .unwrap_err();

    match err {
        QuestError::ApiStatusError { status, url } => {
            assert_eq!(status, 403);
            assert!(url.ends_with("/lol/platform/v3/champion-rotations"));
        }
        other => panic!("unexpected error: {:?}", other),
    }

    Ok(())
}

/// 回應形狀與宣告不符時不回傳部分物件
#[tokio::test]
async fn test_mismatched_payload_fails_whole_call() -> Result<()> {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/lol/champion-mastery/v4/champion-masteries/by-summoner/abc");
            then.status(200).json_body(serde_json::json!([
                {"championId": 1, "championLevel": 5},
                {"championId": "not-a-number", "championLevel": 5}
            ]));
        })
        .await;

    let source = HttpSource::new(server.base_url(), None);
    let client = QuestClient::new(source, QuestEngine::new(ManifestRegistry::with_catalog()));

    let err = client
        .call("mastery.all", &params(&[("id", "abc")]), "na")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        QuestError::ScalarCoercionError { ref path, .. } if path == "$[1].championId"
    ));

    Ok(())
}
