// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

///////////////////////////////////////////////////////////////////////
// Users
///////////////////////////////////////////////////////////////////////

table! {
    users (id) {
        id -> BigInt,
        name -> Text,
        email -> Text,
        role -> SmallInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Restaurants
///////////////////////////////////////////////////////////////////////

table! {
    restaurants (id) {
        id -> BigInt,
        name -> Text,
    }
}

///////////////////////////////////////////////////////////////////////
// Comments
///////////////////////////////////////////////////////////////////////

table! {
    comments (id) {
        id -> BigInt,
        restaurant_id -> BigInt,
        user_id -> BigInt,
        text -> Text,
        // NULL or 0 for top-level comments
        reply_comment_id -> Nullable<BigInt>,
        layer -> Integer,
        created_at -> BigInt,
    }
}

joinable!(comments -> restaurants (restaurant_id));
joinable!(comments -> users (user_id));

table! {
    like_comments (user_id, comment_id) {
        user_id -> BigInt,
        comment_id -> BigInt,
        created_at -> BigInt,
    }
}

joinable!(like_comments -> comments (comment_id));
joinable!(like_comments -> users (user_id));

allow_tables_to_appear_in_same_query!(comments, like_comments, restaurants, users);
