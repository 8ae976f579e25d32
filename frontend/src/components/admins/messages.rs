use common::model::admin::AdminAccount;
use common::model::api_key::ApiKey;
use common::requests::CreateApiKeyResponse;

use crate::api::ApiError;

pub enum Msg {
    AdminsLoaded(Vec<AdminAccount>),
    KeysLoaded(Vec<ApiKey>),
    LoadFailed(ApiError),

    NewEmail(String),
    NewName(String),
    ToggleNewSuper,
    CreateAdmin,
    AdminCreated(AdminAccount),
    CreateAdminFailed(ApiError),

    ToggleAdminActive(i64),
    RequestRoleChange(i64, bool),
    RequestDeleteAdmin(i64),
    AdminUpdated(AdminAccount),
    AdminDeleted(i64),
    AdminActionFailed(i64, ApiError),

    NewKeyName(String),
    ToggleScopeUpload,
    ToggleScopeDownload,
    CreateKey,
    KeyCreated(CreateApiKeyResponse),
    CreateKeyFailed(ApiError),
    CopySecret,
    AcknowledgeSecret,

    ToggleKeyActive(i64),
    RequestDeleteKey(i64),
    KeyUpdated(ApiKey),
    KeyDeleted(i64),
    KeyActionFailed(i64, ApiError),

    TypedConfirmation(String),
    CancelConfirm,
    Confirm,
}
