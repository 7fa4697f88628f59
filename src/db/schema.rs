diesel::table! {
    categories (id) {
        id -> Int4,
        name -> Varchar,
        alias -> Varchar,
        #[sql_name = "order"]
        display_order -> Int4,
        view -> Int4,
    }
}

diesel::table! {
    video_infos (id) {
        id -> Int4,
        title -> Varchar,
        photo -> Varchar,
        view -> Int4,
        teacher -> Varchar,
        #[sql_name = "type"]
        video_type -> Int2,
        recommend -> Int2,
        category_id -> Int4,
    }
}

diesel::table! {
    videos (id) {
        id -> Int4,
        video_info_id -> Int4,
    }
}

diesel::table! {
    users (id) {
        id -> Int4,
        nickname -> Varchar,
        say -> Nullable<Varchar>,
        avatar -> Nullable<Varchar>,
        mobile -> Nullable<Varchar>,
        email -> Nullable<Varchar>,
        phone_binding -> Int2,
        email_binding -> Int2,
        sex -> Int2,
        is_admin -> Int2,
    }
}

diesel::joinable!(video_infos -> categories (category_id));
diesel::joinable!(videos -> video_infos (video_info_id));

diesel::allow_tables_to_appear_in_same_query!(categories, video_infos, videos, users,);
