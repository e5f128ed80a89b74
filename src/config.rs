//! Page configuration
//!
//! Selectors, endpoint, labels and user-facing messages. The defaults match
//! the profile page markup; a page can override any subset by passing a
//! partial object to `mountMyInfoWithConfig`.

use serde::{Deserialize, Serialize};

use crate::error::{MyInfoError, Result};
use crate::models::genre::MAX_SELECTED_GENRES;

/// CSS selectors for every element the controller binds to
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Selectors {
    pub edit_button: String,
    pub save_button: String,
    pub form: String,
    pub editable_fields: String,
    pub address_button: String,
    pub genre_cards: String,
    pub zipcode_field: String,
    pub address_field: String,
    pub detail_address_field: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            edit_button: "#editBtn".to_string(),
            save_button: "#saveBtn".to_string(),
            form: ".info-form".to_string(),
            editable_fields: ".editable".to_string(),
            address_button: "#addressBtn".to_string(),
            genre_cards: ".genre-card".to_string(),
            zipcode_field: "input[name='zipcode']".to_string(),
            address_field: "input[name='addr']".to_string(),
            detail_address_field: "input[name='detailAddr']".to_string(),
        }
    }
}

/// Texts shown to the user
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Messages {
    pub edit_label: String,
    pub cancel_label: String,
    pub genre_limit: String,
    pub save_failed: String,
    pub widget_unavailable: String,
    /// Shown when the widget hands back an unreadable result
    pub address_failed: String,
    /// Shown when the page could not be bound after loading
    pub mount_failed: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            edit_label: "수정".to_string(),
            cancel_label: "취소".to_string(),
            genre_limit: "장르는 최대 3개까지 선택할 수 있어요".to_string(),
            save_failed: "저장 중 오류가 발생했습니다.".to_string(),
            widget_unavailable: "다음 주소 API가 로드되지 않았습니다.".to_string(),
            address_failed: "주소 정보를 불러오지 못했습니다.".to_string(),
            mount_failed: "페이지를 준비하지 못했습니다. 새로고침 해주세요.".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    pub selectors: Selectors,
    pub messages: Messages,

    /// POST target for the genre selection
    pub genre_endpoint: String,

    pub max_genres: usize,

    /// Field background while editable
    pub editable_background: String,

    /// Field background while read-only
    pub readonly_background: String,

    /// `display` value of the save control while editing
    pub save_button_display: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            messages: Messages::default(),
            genre_endpoint: "/mypage/myinfo/genres".to_string(),
            max_genres: MAX_SELECTED_GENRES,
            editable_background: "#fff".to_string(),
            readonly_background: "#f3f3f3".to_string(),
            save_button_display: "inline-block".to_string(),
        }
    }
}

impl PageConfig {
    pub fn validate(&self) -> Result<()> {
        if self.genre_endpoint.trim().is_empty() {
            return Err(MyInfoError::InvalidConfig(
                "genreEndpoint must not be empty".to_string(),
            ));
        }
        if self.max_genres == 0 {
            return Err(MyInfoError::InvalidConfig(
                "maxGenres must be at least 1".to_string(),
            ));
        }
        if self.selectors.form.trim().is_empty() {
            return Err(MyInfoError::InvalidConfig(
                "selectors.form must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
