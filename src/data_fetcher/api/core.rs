// Provider queries: team directory, standings snapshot and team game log.
// Each call returns the raw record set; field selection happens in the transformers.

use reqwest::Client;
use tracing::{info, instrument};

use super::fetch_utils::fetch_record_set;
use super::urls::{build_game_log_url, build_standings_url, build_team_directory_url};
use crate::config::Config;
use crate::data_fetcher::models::RecordSet;
use crate::error::AppError;
use crate::season::Season;

/// Fetches every franchise with its team id and abbreviation.
#[instrument(skip(client, config))]
pub async fn fetch_team_directory(client: &Client, config: &Config) -> Result<RecordSet, AppError> {
    let url = build_team_directory_url(&config.api_domain);
    let set = fetch_record_set(client, &url).await?;
    info!("Fetched team directory with {} entries", set.len());
    Ok(set)
}

/// Fetches the league standings as of now for `season`.
#[instrument(skip(client, config))]
pub async fn fetch_standings(
    client: &Client,
    config: &Config,
    season: Season,
) -> Result<RecordSet, AppError> {
    let url = build_standings_url(&config.api_domain, season);
    let set = fetch_record_set(client, &url).await?;
    info!("Fetched standings for {season}: {} teams", set.len());
    Ok(set)
}

/// Fetches the game log for every team and every game played so far in `season`.
/// Each game appears twice, once from each team's perspective.
#[instrument(skip(client, config))]
pub async fn fetch_game_log(
    client: &Client,
    config: &Config,
    season: Season,
) -> Result<RecordSet, AppError> {
    let url = build_game_log_url(&config.api_domain, season);
    let set = fetch_record_set(client, &url).await?;
    info!("Fetched game log for {season}: {} team-game rows", set.len());
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{header, method, path, query_param},
    };

    fn create_mock_config(api_domain: String) -> Config {
        Config {
            api_domain,
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn test_fetch_standings_success() {
        let mock_server = MockServer::start().await;
        let client = create_test_http_client();
        let config = create_mock_config(mock_server.uri());

        let body = json!({
            "resource": "leaguestandingsv3",
            "resultSets": [{
                "name": "Standings",
                "headers": ["TeamName", "HOME"],
                "rowSet": [["Nuggets", "34-7"], ["Celtics", "32-9"]]
            }]
        });

        Mock::given(method("GET"))
            .and(path("/leaguestandingsv3"))
            .and(query_param("Season", "2022-23"))
            .and(query_param("SeasonType", "Regular Season"))
            .and(header("x-nba-stats-token", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let set = fetch_standings(&client, &config, Season::new(2022))
            .await
            .unwrap();
        assert_eq!(set.name, "Standings");
        assert_eq!(set.len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_team_directory_success() {
        let mock_server = MockServer::start().await;
        let client = create_test_http_client();
        let config = create_mock_config(mock_server.uri());

        let body = json!({
            "resultSets": [{
                "name": "TeamYears",
                "headers": ["LEAGUE_ID", "TEAM_ID", "MIN_YEAR", "MAX_YEAR", "ABBREVIATION"],
                "rowSet": [["00", 1610612743, "1976", "2023", "DEN"]]
            }]
        });

        Mock::given(method("GET"))
            .and(path("/commonteamyears"))
            .and(query_param("LeagueID", "00"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&mock_server)
            .await;

        let set = fetch_team_directory(&client, &config).await.unwrap();
        assert_eq!(set.len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_game_log_server_error_is_not_retried() {
        let mock_server = MockServer::start().await;
        let client = create_test_http_client();
        let config = create_mock_config(mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/leaguegamefinder"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&mock_server)
            .await;

        let result = fetch_game_log(&client, &config, Season::new(2022)).await;
        assert!(matches!(
            result,
            Err(AppError::ApiServerError { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_service_unavailable() {
        let mock_server = MockServer::start().await;
        let client = create_test_http_client();
        let config = create_mock_config(mock_server.uri());

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let result = fetch_standings(&client, &config, Season::new(2022)).await;
        assert!(matches!(
            result,
            Err(AppError::ApiServiceUnavailable { status: 503, .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_not_found() {
        let mock_server = MockServer::start().await;
        let client = create_test_http_client();
        let config = create_mock_config(mock_server.uri());

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let result = fetch_team_directory(&client, &config).await;
        assert!(matches!(result, Err(AppError::ApiNotFound { .. })));
    }

    #[tokio::test]
    async fn test_fetch_rate_limited() {
        let mock_server = MockServer::start().await;
        let client = create_test_http_client();
        let config = create_mock_config(mock_server.uri());

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429))
            .expect(1)
            .mount(&mock_server)
            .await;

        let result = fetch_standings(&client, &config, Season::new(2022)).await;
        assert!(matches!(result, Err(AppError::ApiRateLimit { .. })));
    }

    #[tokio::test]
    async fn test_fetch_without_result_sets() {
        let mock_server = MockServer::start().await;
        let client = create_test_http_client();
        let config = create_mock_config(mock_server.uri());

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"resultSets": []})))
            .mount(&mock_server)
            .await;

        let result = fetch_game_log(&client, &config, Season::new(2022)).await;
        assert!(matches!(result, Err(AppError::ApiNoData { .. })));
    }

    #[tokio::test]
    async fn test_fetch_malformed_body() {
        let mock_server = MockServer::start().await;
        let client = create_test_http_client();
        let config = create_mock_config(mock_server.uri());

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("Access Denied"))
            .mount(&mock_server)
            .await;

        let result = fetch_standings(&client, &config, Season::new(2022)).await;
        assert!(matches!(result, Err(AppError::ApiMalformedJson { .. })));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        // Bind and drop a server so the port is closed
        let uri = {
            let mock_server = MockServer::start().await;
            mock_server.uri()
        };
        let client = create_test_http_client();
        let config = create_mock_config(uri);

        let result = fetch_team_directory(&client, &config).await;
        assert!(matches!(result, Err(AppError::NetworkConnection { .. })));
    }

    #[tokio::test]
    async fn test_fetch_game_log_requests_all_season_types() {
        let mock_server = MockServer::start().await;
        let client = create_test_http_client();
        let config = create_mock_config(mock_server.uri());

        let body = json!({
            "resultSets": [{
                "name": "LeagueGameFinderResults",
                "headers": ["TEAM_ID", "GAME_ID", "MATCHUP"],
                "rowSet": [
                    [1610612743, "0022200001", "DEN vs. LAL"],
                    [1610612743, "0042200401", "DEN vs. MIA"]
                ]
            }]
        });

        Mock::given(method("GET"))
            .and(path("/leaguegamefinder"))
            .and(query_param("Season", "2022-23"))
            .and(query_param("PlayerOrTeam", "T"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let set = fetch_game_log(&client, &config, Season::new(2022))
            .await
            .unwrap();
        assert_eq!(set.len(), 2);

        let requests = mock_server.received_requests().await.unwrap();
        assert!(
            requests[0]
                .url
                .query_pairs()
                .all(|(key, _)| key != "SeasonType")
        );
    }
}
