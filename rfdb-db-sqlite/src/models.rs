#![allow(clippy::extra_unused_lifetimes)]

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub role: i16,
}

#[derive(Queryable)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: i16,
}

#[derive(Insertable)]
#[diesel(table_name = restaurants)]
pub struct NewRestaurant<'a> {
    pub name: &'a str,
}

#[derive(Queryable)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = comments)]
pub struct NewComment {
    pub restaurant_id: i64,
    pub user_id: i64,
    pub text: String,
    pub reply_comment_id: Option<i64>,
    pub layer: i32,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct Comment {
    pub id: i64,
    pub restaurant_id: i64,
    pub user_id: i64,
    pub text: String,
    pub reply_comment_id: Option<i64>,
    pub layer: i32,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = like_comments)]
pub struct NewLikeComment {
    pub user_id: i64,
    pub comment_id: i64,
    pub created_at: i64,
}
