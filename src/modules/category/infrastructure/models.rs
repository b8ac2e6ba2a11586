use crate::modules::category::domain::entities::Category;
use crate::schema::categories;
use diesel::prelude::*;

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = categories)]
pub struct CategoryModel {
    pub id: i32,
    pub name: String,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = categories)]
pub struct NewCategoryModel {
    pub name: String,
}

impl CategoryModel {
    pub fn into_entity(self) -> Category {
        Category {
            id: self.id,
            name: self.name,
        }
    }
}
