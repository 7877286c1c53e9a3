//! SeaORM entities for database tables

/// Products table entity
pub mod product {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "products")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,

        pub name: String,

        #[sea_orm(column_type = "Double")]
        pub price: f64,

        /// Path of the uploaded image
        pub image_url: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

/// Orders table entity
pub mod order {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "orders")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,

        /// Legacy free-text summary
        pub menu: Option<String>,

        /// "On Progress", "Order Completed" or "Order Canceled"
        pub status: String,

        #[sea_orm(column_type = "Double", nullable)]
        pub total_price: Option<f64>,

        pub created_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        /// One-to-many relationship with order details
        #[sea_orm(has_many = "super::order_detail::Entity")]
        OrderDetails,
    }

    impl Related<super::order_detail::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::OrderDetails.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Order details table entity
pub mod order_detail {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "order_details")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,

        pub order_id: i32,

        /// Copy of the product name at order time
        pub product_name: String,

        pub quantity: i32,

        #[sea_orm(column_type = "Double")]
        pub total_price: f64,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        /// Foreign key to orders
        #[sea_orm(
            belongs_to = "super::order::Entity",
            from = "Column::OrderId",
            to = "super::order::Column::Id",
            on_delete = "Cascade"
        )]
        Order,
    }

    impl Related<super::order::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Order.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Users table entity
pub mod user {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "users")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,

        #[sea_orm(unique)]
        pub username: String,

        /// bcrypt hash
        pub password: String,

        pub role: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}
