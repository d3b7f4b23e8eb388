//! Protobuf messages for `bilibili.app.dynamic.v2.Dynamic/DynVideo`.
//!
//! Only the fields this client reads are declared; prost skips the rest of
//! the wire message.

/// Request for one page of the followed-uploaders video feed.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DynVideoReq {
    #[prost(string, tag = "1")]
    pub update_baseline: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub offset: ::prost::alloc::string::String,
    #[prost(int32, tag = "3")]
    pub page: i32,
    #[prost(enumeration = "Refresh", tag = "4")]
    pub refresh_type: i32,
    /// UTC offset in hours.
    #[prost(int32, tag = "6")]
    pub local_time: i32,
}

/// Whether the feed is read from the top or continued into history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum Refresh {
    New = 0,
    History = 1,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DynVideoReply {
    #[prost(message, optional, tag = "1")]
    pub dynamic_list: ::core::option::Option<DynamicList>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DynamicList {
    #[prost(message, repeated, tag = "1")]
    pub list: ::prost::alloc::vec::Vec<DynamicItem>,
    #[prost(int64, tag = "2")]
    pub update_num: i64,
    #[prost(string, tag = "3")]
    pub history_offset: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub update_baseline: ::prost::alloc::string::String,
    #[prost(bool, tag = "5")]
    pub has_more: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum DynamicType {
    DynNone = 0,
    Forward = 1,
    Av = 2,
    Pgc = 3,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DynamicItem {
    #[prost(enumeration = "DynamicType", tag = "1")]
    pub card_type: i32,
    #[prost(message, repeated, tag = "3")]
    pub modules: ::prost::alloc::vec::Vec<Module>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Module {
    #[prost(oneof = "module::ModuleItem", tags = "2, 5")]
    pub module_item: ::core::option::Option<module::ModuleItem>,
}

pub mod module {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum ModuleItem {
        #[prost(message, tag = "2")]
        ModuleAuthor(super::ModuleAuthor),
        #[prost(message, tag = "5")]
        ModuleDynamic(super::ModuleDynamic),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ModuleAuthor {
    #[prost(int64, tag = "1")]
    pub mid: i64,
    #[prost(string, tag = "2")]
    pub ptime_label_text: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "3")]
    pub author: ::core::option::Option<UserInfo>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UserInfo {
    #[prost(int64, tag = "1")]
    pub mid: i64,
    #[prost(string, tag = "2")]
    pub name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub face: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ModuleDynamic {
    #[prost(oneof = "module_dynamic::ModuleItem", tags = "2")]
    pub module_item: ::core::option::Option<module_dynamic::ModuleItem>,
}

pub mod module_dynamic {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum ModuleItem {
        #[prost(message, tag = "2")]
        DynArchive(super::MdlDynArchive),
    }
}

/// Video archive card.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MdlDynArchive {
    #[prost(string, tag = "1")]
    pub cover: ::prost::alloc::string::String,
    /// Duration text, e.g. `"12:34"`.
    #[prost(string, tag = "2")]
    pub cover_left_text_1: ::prost::alloc::string::String,
    /// Play count text, e.g. `"1.2万观看"`.
    #[prost(string, tag = "3")]
    pub cover_left_text_2: ::prost::alloc::string::String,
    /// Danmaku count text, e.g. `"300弹幕"`.
    #[prost(string, tag = "4")]
    pub cover_left_text_3: ::prost::alloc::string::String,
    #[prost(string, tag = "6")]
    pub title: ::prost::alloc::string::String,
    #[prost(int64, tag = "7")]
    pub avid: i64,
    #[prost(int64, tag = "8")]
    pub cid: i64,
    #[prost(int64, tag = "19")]
    pub duration: i64,
    #[prost(string, tag = "20")]
    pub bvid: ::prost::alloc::string::String,
}
