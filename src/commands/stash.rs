//! Stash Commands
//!
//! Typed wrappers for the stash callbacks. Mutations never patch local
//! state: once the host accepts one, the caller runs its success step and
//! then replaces the list via `refresh_stashes`. A failed refresh does not
//! undo an accepted mutation.

use serde::Serialize;
use serde_json::{json, Value};

use super::{BridgeError, Endpoint, HostBridge};
use crate::models::{decode_snapshot, CommandResult, StashPayload, StashRecord, Vec3};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct StashIdArgs<'a> {
    stash_id: &'a str,
}

#[derive(Serialize)]
struct CoordsArgs {
    coords: Vec3,
}

fn encode<T: Serialize>(endpoint: Endpoint, args: &T) -> Result<Value, BridgeError> {
    serde_json::to_value(args).map_err(|e| BridgeError::Encode {
        endpoint,
        reason: e.to_string(),
    })
}

/// Call a mutating endpoint and require a truthy `success`
async fn command<B>(bridge: &B, endpoint: Endpoint, body: Value) -> Result<(), BridgeError>
where
    B: HostBridge + ?Sized,
{
    let answer = bridge.request(endpoint, body).await?;
    let result: CommandResult = serde_json::from_value(answer).map_err(|e| BridgeError::Decode {
        endpoint,
        reason: e.to_string(),
    })?;
    if result.success {
        Ok(())
    } else {
        Err(BridgeError::Rejected { endpoint })
    }
}

// ========================
// Commands
// ========================

/// Current snapshot, in host order
pub async fn refresh_stashes<B>(bridge: &B) -> Result<Vec<StashRecord>, BridgeError>
where
    B: HostBridge + ?Sized,
{
    let endpoint = Endpoint::GetStashes;
    let answer = bridge.request(endpoint, json!({})).await?;
    decode_snapshot(answer).map_err(|e| BridgeError::Decode {
        endpoint,
        reason: e.to_string(),
    })
}

/// Create a stash; `Ok` once the host accepted it
pub async fn create_stash<B>(bridge: &B, payload: &StashPayload) -> Result<(), BridgeError>
where
    B: HostBridge + ?Sized,
{
    let endpoint = Endpoint::CreateStash;
    command(bridge, endpoint, encode(endpoint, payload)?).await?;
    log::info!("[BRIDGE] created stash '{}'", payload.stash_id);
    Ok(())
}

/// Overwrite a stash
pub async fn update_stash<B>(bridge: &B, payload: &StashPayload) -> Result<(), BridgeError>
where
    B: HostBridge + ?Sized,
{
    let endpoint = Endpoint::UpdateStash;
    command(bridge, endpoint, encode(endpoint, payload)?).await?;
    log::info!("[BRIDGE] updated stash '{}'", payload.stash_id);
    Ok(())
}

/// Delete a stash
pub async fn delete_stash<B>(bridge: &B, stash_id: &str) -> Result<(), BridgeError>
where
    B: HostBridge + ?Sized,
{
    let endpoint = Endpoint::DeleteStash;
    command(bridge, endpoint, encode(endpoint, &StashIdArgs { stash_id })?).await?;
    log::info!("[BRIDGE] deleted stash '{}'", stash_id);
    Ok(())
}

/// Teleport the player to a stash from the current snapshot.
/// Unknown ids send nothing.
pub async fn teleport_to_stash<B>(bridge: &B, stashes: &[StashRecord], stash_id: &str) -> Result<(), BridgeError>
where
    B: HostBridge + ?Sized,
{
    let Some(stash) = stashes.iter().find(|s| s.stash_id == stash_id) else {
        log::debug!("[BRIDGE] teleport: '{}' not in snapshot", stash_id);
        return Ok(());
    };
    let endpoint = Endpoint::TeleportToStash;
    bridge
        .notify(endpoint, encode(endpoint, &CoordsArgs { coords: stash.coords })?)
        .await
}

/// Ask the host to focus/highlight a stash in the world
pub async fn view_stash<B>(bridge: &B, stash_id: &str) -> Result<(), BridgeError>
where
    B: HostBridge + ?Sized,
{
    let endpoint = Endpoint::ViewStash;
    bridge.notify(endpoint, encode(endpoint, &StashIdArgs { stash_id })?).await
}

/// Tell the host the panel was closed so it can release input focus
pub async fn close_panel<B>(bridge: &B) -> Result<(), BridgeError>
where
    B: HostBridge + ?Sized,
{
    bridge.notify(Endpoint::Close, json!({})).await
}

/// The acting player's world position
pub async fn get_player_coords<B>(bridge: &B) -> Result<Vec3, BridgeError>
where
    B: HostBridge + ?Sized,
{
    let endpoint = Endpoint::GetPlayerCoords;
    let answer = bridge.request(endpoint, json!({})).await?;
    serde_json::from_value(answer).map_err(|e| BridgeError::Decode {
        endpoint,
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::mock::MockBridge;
    use crate::forms::{StashForm, Vec3Fields};
    use crate::models::fixtures::{police_storage, stash};
    use leptos_nui::NuiError;

    fn snapshot_json() -> Value {
        json!([{
            "stash_id": "police_storage", "label": "Police Storage",
            "slots": 50, "weight": 100,
            "coords": {"x": 1, "y": 2, "z": 3},
            "size": {"x": 1, "y": 1, "z": 1},
            "code": "1234", "rotation": 0, "debug": false
        }])
    }

    #[tokio::test]
    async fn test_delete_then_refresh_returns_host_snapshot() {
        let bridge = MockBridge::default()
            .respond(Ok(json!({"success": true})))
            .respond(Ok(snapshot_json()));

        delete_stash(&bridge, "police_storage").await.unwrap();
        let fresh = refresh_stashes(&bridge).await.unwrap();

        assert_eq!(bridge.endpoints(), [Endpoint::DeleteStash, Endpoint::GetStashes]);
        assert_eq!(bridge.body(0), json!({"stash_id": "police_storage"}));
        assert_eq!(bridge.body(1), json!({}));
        // identical to what we had, still replaced from the host's answer
        assert_eq!(fresh, vec![police_storage()]);
    }

    #[tokio::test]
    async fn test_rejected_command_skips_refresh() {
        let bridge = MockBridge::default().respond(Ok(json!({"success": false})));

        let err = delete_stash(&bridge, "police_storage").await.unwrap_err();

        assert_eq!(err, BridgeError::Rejected { endpoint: Endpoint::DeleteStash });
        assert_eq!(bridge.endpoints(), [Endpoint::DeleteStash]);
    }

    #[tokio::test]
    async fn test_malformed_answer_is_a_decode_error() {
        let bridge = MockBridge::default().respond(Ok(json!("ok")));

        let err = update_stash(&bridge, &StashForm::default().to_payload()).await.unwrap_err();

        assert!(matches!(err, BridgeError::Decode { endpoint: Endpoint::UpdateStash, .. }));
        assert_eq!(bridge.endpoints(), [Endpoint::UpdateStash]);
    }

    #[tokio::test]
    async fn test_create_sends_form_payload_verbatim() {
        let bridge = MockBridge::default().respond(Ok(json!({"success": true})));
        let form = StashForm {
            stash_id: "gang_locker".into(),
            label: "Gang Locker".into(),
            slots: "10".into(),
            weight: "20".into(),
            rotation: String::new(),
            coords: Vec3Fields { x: "1".into(), y: "2".into(), z: "3".into() },
            ..StashForm::default()
        };

        create_stash(&bridge, &form.to_payload()).await.unwrap();

        assert_eq!(bridge.endpoints(), [Endpoint::CreateStash]);
        let body = bridge.body(0);
        assert_eq!(body["slots"], json!(10));
        assert_eq!(body["weight"], json!(20));
        assert!(body["rotation"].is_null());
        assert!(body["size"]["x"].is_null());
        assert_eq!(body["coords"], json!({"x": 1.0, "y": 2.0, "z": 3.0}));
    }

    #[tokio::test]
    async fn test_accepted_create_survives_failed_refresh() {
        let bridge = MockBridge::default()
            .respond(Ok(json!({"success": true})))
            .respond(Err(NuiError::Status(500).into()));

        let created = create_stash(&bridge, &StashForm::default().to_payload()).await;
        let refreshed = refresh_stashes(&bridge).await;

        assert_eq!(created, Ok(()));
        assert_eq!(refreshed, Err(BridgeError::Transport(NuiError::Status(500))));
        assert_eq!(bridge.endpoints(), [Endpoint::CreateStash, Endpoint::GetStashes]);
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let bridge = MockBridge::default();
        let err = refresh_stashes(&bridge).await.unwrap_err();
        assert!(matches!(err, BridgeError::Transport(_)));
    }

    #[tokio::test]
    async fn test_refresh_accepts_empty_lua_table() {
        let bridge = MockBridge::default().respond(Ok(json!({})));
        assert!(refresh_stashes(&bridge).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_teleport_sends_coords_of_known_stash() {
        let bridge = MockBridge::default();
        let stashes = vec![stash("a", "A"), police_storage()];

        teleport_to_stash(&bridge, &stashes, "police_storage").await.unwrap();
        teleport_to_stash(&bridge, &stashes, "missing").await.unwrap();

        assert_eq!(bridge.endpoints(), [Endpoint::TeleportToStash]);
        assert_eq!(bridge.body(0), json!({"coords": {"x": 1.0, "y": 2.0, "z": 3.0}}));
    }

    #[tokio::test]
    async fn test_fire_and_forget_calls() {
        let bridge = MockBridge::default();

        view_stash(&bridge, "police_storage").await.unwrap();
        close_panel(&bridge).await.unwrap();

        assert_eq!(bridge.endpoints(), [Endpoint::ViewStash, Endpoint::Close]);
        assert_eq!(bridge.body(0), json!({"stash_id": "police_storage"}));
        assert_eq!(bridge.body(1), json!({}));
    }

    #[tokio::test]
    async fn test_player_coords() {
        let bridge = MockBridge::default().respond(Ok(json!({"x": 215.5, "y": -810.25, "z": 30})));

        let coords = get_player_coords(&bridge).await.unwrap();

        assert_eq!(coords, Vec3::new(215.5, -810.25, 30.0));
        assert_eq!(bridge.endpoints(), [Endpoint::GetPlayerCoords]);
    }
}
