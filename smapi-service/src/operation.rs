//! The SMAPI 1.1 action table

use std::fmt;

/// Namespace prefixed to action names in the `SOAPAction` HTTP header
pub const SOAP_ACTION_NAMESPACE: &str = "http://www.sonos.com/Services/1.1#";

/// Every action a controller may invoke on a music service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    GetLastUpdate,
    GetMetadata,
    Search,
    GetSessionId,
    GetMediaMetadata,
    GetMediaUri,
    CreateItem,
    DeleteItem,
    RateItem,
    CreateContainer,
    AddToContainer,
    RenameContainer,
    GetStreamingMetadata,
    ReorderContainer,
    GetExtendedMetadataText,
    GetDeviceLinkCode,
    ReportAccountAction,
    SetPlayedSeconds,
    ReportPlaySeconds,
    GetDeviceAuthToken,
    ReportStatus,
    GetExtendedMetadata,
    GetScrollIndices,
    DeleteContainer,
    ReportPlayStatus,
    GetContentKey,
    RemoveFromContainer,
}

impl Operation {
    pub const ALL: [Operation; 27] = [
        Operation::GetLastUpdate,
        Operation::GetMetadata,
        Operation::Search,
        Operation::GetSessionId,
        Operation::GetMediaMetadata,
        Operation::GetMediaUri,
        Operation::CreateItem,
        Operation::DeleteItem,
        Operation::RateItem,
        Operation::CreateContainer,
        Operation::AddToContainer,
        Operation::RenameContainer,
        Operation::GetStreamingMetadata,
        Operation::ReorderContainer,
        Operation::GetExtendedMetadataText,
        Operation::GetDeviceLinkCode,
        Operation::ReportAccountAction,
        Operation::SetPlayedSeconds,
        Operation::ReportPlaySeconds,
        Operation::GetDeviceAuthToken,
        Operation::ReportStatus,
        Operation::GetExtendedMetadata,
        Operation::GetScrollIndices,
        Operation::DeleteContainer,
        Operation::ReportPlayStatus,
        Operation::GetContentKey,
        Operation::RemoveFromContainer,
    ];

    /// SOAP action name
    pub fn name(&self) -> &'static str {
        match self {
            Operation::GetLastUpdate => "getLastUpdate",
            Operation::GetMetadata => "getMetadata",
            Operation::Search => "search",
            Operation::GetSessionId => "getSessionId",
            Operation::GetMediaMetadata => "getMediaMetadata",
            Operation::GetMediaUri => "getMediaURI",
            Operation::CreateItem => "createItem",
            Operation::DeleteItem => "deleteItem",
            Operation::RateItem => "rateItem",
            Operation::CreateContainer => "createContainer",
            Operation::AddToContainer => "addToContainer",
            Operation::RenameContainer => "renameContainer",
            Operation::GetStreamingMetadata => "getStreamingMetadata",
            Operation::ReorderContainer => "reorderContainer",
            Operation::GetExtendedMetadataText => "getExtendedMetadataText",
            Operation::GetDeviceLinkCode => "getDeviceLinkCode",
            Operation::ReportAccountAction => "reportAccountAction",
            Operation::SetPlayedSeconds => "setPlayedSeconds",
            Operation::ReportPlaySeconds => "reportPlaySeconds",
            Operation::GetDeviceAuthToken => "getDeviceAuthToken",
            Operation::ReportStatus => "reportStatus",
            Operation::GetExtendedMetadata => "getExtendedMetadata",
            Operation::GetScrollIndices => "getScrollIndices",
            Operation::DeleteContainer => "deleteContainer",
            Operation::ReportPlayStatus => "reportPlayStatus",
            Operation::GetContentKey => "getContentKey",
            Operation::RemoveFromContainer => "removeFromContainer",
        }
    }

    /// Whether this service answers the action
    pub fn is_supported(&self) -> bool {
        matches!(
            self,
            Operation::GetLastUpdate
                | Operation::GetMetadata
                | Operation::Search
                | Operation::GetSessionId
                | Operation::GetMediaMetadata
                | Operation::GetMediaUri
                | Operation::CreateItem
                | Operation::DeleteItem
        )
    }

    /// Parse a `SOAPAction` header value.
    ///
    /// Accepts the bare name as well as the quoted, namespaced form
    /// `"http://www.sonos.com/Services/1.1#getMetadata"`.
    pub fn from_action(action: &str) -> Option<Self> {
        let action = action.trim().trim_matches('"');
        let name = action.strip_prefix(SOAP_ACTION_NAMESPACE).unwrap_or(action);
        Self::ALL.into_iter().find(|op| op.name() == name)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_names_round_trip() {
        for op in Operation::ALL {
            assert_eq!(Operation::from_action(op.name()), Some(op));
        }
    }

    #[test]
    fn test_namespaced_action() {
        assert_eq!(
            Operation::from_action(r#""http://www.sonos.com/Services/1.1#getMediaURI""#),
            Some(Operation::GetMediaUri)
        );
        assert_eq!(Operation::from_action("getNothing"), None);
    }

    #[test]
    fn test_supported_set() {
        let supported: Vec<_> = Operation::ALL.into_iter().filter(|op| op.is_supported()).collect();
        assert_eq!(supported.len(), 8);
        assert!(!Operation::RateItem.is_supported());
        assert!(!Operation::RemoveFromContainer.is_supported());
    }
}
