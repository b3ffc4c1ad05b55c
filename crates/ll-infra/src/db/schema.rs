// Mirrors the embedded migrations under `migrations/`.

diesel::table! {
    menu (id) {
        id -> Text,
        name -> Text,
        price -> Double,
        category -> Text,
        description -> Nullable<Text>,
        image -> Nullable<Text>,
    }
}

diesel::table! {
    onboarding (id) {
        id -> Text,
        completed -> Integer,
        first_name -> Nullable<Text>,
        email -> Nullable<Text>,
    }
}

diesel::table! {
    user_profile (id) {
        id -> Text,
        first_name -> Text,
        last_name -> Nullable<Text>,
        email -> Text,
        phone_number -> Nullable<Text>,
        avatar -> Nullable<Text>,
        order_status_notification -> Integer,
        password_change_notification -> Integer,
        special_offers_notification -> Integer,
        newsletter_notification -> Integer,
    }
}

diesel::allow_tables_to_appear_in_same_query!(menu, onboarding, user_profile,);
