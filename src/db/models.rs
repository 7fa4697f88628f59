use diesel::prelude::*;

#[derive(Debug, Queryable, Selectable, Clone, PartialEq)]
#[diesel(table_name = crate::db::schema::categories)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub alias: String,
    pub display_order: i32,
    pub view: i32,
}

#[derive(Debug, Queryable, Selectable, Clone, PartialEq)]
#[diesel(table_name = crate::db::schema::video_infos)]
pub struct VideoInfo {
    pub id: i32,
    pub title: String,
    pub photo: String,
    pub view: i32,
    pub teacher: String,
    pub video_type: i16,
    pub recommend: i16,
    pub category_id: i32,
}

#[derive(Debug, Queryable, Selectable, Clone, PartialEq)]
#[diesel(table_name = crate::db::schema::videos)]
pub struct Video {
    pub id: i32,
    pub video_info_id: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::db::schema::users)]
pub struct NewUser<'a> {
    pub nickname: &'a str,
    pub say: Option<&'a str>,
    pub avatar: Option<&'a str>,
    pub mobile: Option<&'a str>,
    pub email: Option<&'a str>,
    pub phone_binding: i16,
    pub email_binding: i16,
    pub sex: i16,
    pub is_admin: i16,
}

/// Predicate shared by the page fetch and its total count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoInfoFilter {
    /// `None` covers every category.
    pub category_id: Option<i32>,
    pub min_recommend: i16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based.
    pub number: i64,
    pub size: i64,
}

impl PageRequest {
    /// `None` when the page lies beyond any representable offset.
    pub fn offset(&self) -> Option<i64> {
        (self.number.max(1) - 1).checked_mul(self.size)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VideoInfoSlice {
    pub rows: Vec<VideoInfo>,
    pub total: i64,
}
